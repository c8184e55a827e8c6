use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use bma_boundary::{
    CoffeeShop, CoffeeShopPatch, CreatedDoc, Event, EventPatch, Interest, InterestPatch,
    NewCoffeeShop, NewEvent, NewInterest, NewReview, NewUser, Review, ReviewPatch, User, UserPatch,
};

use crate::{auth_header_value, expect_ok, into_json, Result};

const USERS: &str = "users";
const COFFEE_SHOPS: &str = "coffeeShops";
const INTERESTS: &str = "interests";
const REVIEWS: &str = "reviews";
const EVENTS: &str = "events";

/// Authorized client of the hosted document store.
///
/// Every call carries the session token. Each collection supports the
/// same five operations; cross-document writes are independent requests
/// with no transactional guarantee.
#[derive(Clone)]
pub struct DocumentApi {
    url: String,
    token: String,
}

impl DocumentApi {
    #[must_use]
    pub const fn new(url: String, token: String) -> Self {
        Self { url, token }
    }

    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", &auth_header_value(&self.token))
    }

    /// Newest documents first.
    async fn fetch_all<T>(&self, collection: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{collection}?orderBy=createdAt&order=desc", self.url);
        let response = self.add_auth_headers(Request::get(&url)).send().await?;
        into_json(response).await
    }

    async fn fetch_one<T>(&self, collection: &str, id: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{collection}/{id}", self.url);
        let response = self.add_auth_headers(Request::get(&url)).send().await?;
        if response.status() == 404 {
            return Ok(None);
        }
        into_json(response).await.map(Some)
    }

    async fn create<D>(&self, collection: &str, doc: &D) -> Result<String>
    where
        D: Serialize,
    {
        let url = format!("{}/{collection}", self.url);
        let response = self
            .add_auth_headers(Request::post(&url))
            .json(doc)?
            .send()
            .await?;
        let created: CreatedDoc = into_json(response).await?;
        Ok(created.id)
    }

    async fn update<D>(&self, collection: &str, id: &str, patch: &D) -> Result<()>
    where
        D: Serialize,
    {
        let url = format!("{}/{collection}/{id}", self.url);
        let response = self
            .add_auth_headers(Request::patch(&url))
            .json(patch)?
            .send()
            .await?;
        expect_ok(response).await
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<()> {
        let url = format!("{}/{collection}/{id}", self.url);
        let response = self.add_auth_headers(Request::delete(&url)).send().await?;
        expect_ok(response).await
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.fetch_all(USERS).await
    }

    pub async fn user(&self, id: &str) -> Result<Option<User>> {
        self.fetch_one(USERS, id).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<String> {
        self.create(USERS, user).await
    }

    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<()> {
        self.update(USERS, id, patch).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.remove(USERS, id).await
    }

    pub async fn coffee_shops(&self) -> Result<Vec<CoffeeShop>> {
        self.fetch_all(COFFEE_SHOPS).await
    }

    pub async fn coffee_shop(&self, id: &str) -> Result<Option<CoffeeShop>> {
        self.fetch_one(COFFEE_SHOPS, id).await
    }

    pub async fn create_coffee_shop(&self, shop: &NewCoffeeShop) -> Result<String> {
        self.create(COFFEE_SHOPS, shop).await
    }

    pub async fn update_coffee_shop(&self, id: &str, patch: &CoffeeShopPatch) -> Result<()> {
        self.update(COFFEE_SHOPS, id, patch).await
    }

    pub async fn delete_coffee_shop(&self, id: &str) -> Result<()> {
        self.remove(COFFEE_SHOPS, id).await
    }

    pub async fn interests(&self) -> Result<Vec<Interest>> {
        self.fetch_all(INTERESTS).await
    }

    pub async fn interest(&self, id: &str) -> Result<Option<Interest>> {
        self.fetch_one(INTERESTS, id).await
    }

    pub async fn create_interest(&self, interest: &NewInterest) -> Result<String> {
        self.create(INTERESTS, interest).await
    }

    pub async fn update_interest(&self, id: &str, patch: &InterestPatch) -> Result<()> {
        self.update(INTERESTS, id, patch).await
    }

    pub async fn delete_interest(&self, id: &str) -> Result<()> {
        self.remove(INTERESTS, id).await
    }

    pub async fn reviews(&self) -> Result<Vec<Review>> {
        self.fetch_all(REVIEWS).await
    }

    pub async fn review(&self, id: &str) -> Result<Option<Review>> {
        self.fetch_one(REVIEWS, id).await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<String> {
        self.create(REVIEWS, review).await
    }

    pub async fn update_review(&self, id: &str, patch: &ReviewPatch) -> Result<()> {
        self.update(REVIEWS, id, patch).await
    }

    pub async fn delete_review(&self, id: &str) -> Result<()> {
        self.remove(REVIEWS, id).await
    }

    pub async fn events(&self) -> Result<Vec<Event>> {
        self.fetch_all(EVENTS).await
    }

    pub async fn event(&self, id: &str) -> Result<Option<Event>> {
        self.fetch_one(EVENTS, id).await
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<String> {
        self.create(EVENTS, event).await
    }

    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<()> {
        self.update(EVENTS, id, patch).await
    }

    pub async fn delete_event(&self, id: &str) -> Result<()> {
        self.remove(EVENTS, id).await
    }
}
