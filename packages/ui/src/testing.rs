//! In-memory stand-in for the REST API, used by controller tests.

use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::rc::Rc;

use api::{
    ApiError, AuthApi, Car, CarApi, CarInput, CarLookup, Credentials, Token, UserCreate, UserInfo,
};
use store::{session, MemoryStore};

#[derive(Default)]
pub(crate) struct FakeApi {
    accounts: RefCell<Vec<(String, String)>>,
    cars: RefCell<Vec<Car>>,
    next_id: Cell<u32>,
    offline: bool,
    failing_deletes: bool,
    calls: RefCell<Vec<String>>,
    token_source: RefCell<Option<MemoryStore>>,
    last_bearer: RefCell<Option<String>>,
}

impl FakeApi {
    pub(crate) fn with_account(email: &str, password: &str) -> Self {
        let api = Self::default();
        api.accounts
            .borrow_mut()
            .push((email.to_string(), password.to_string()));
        api
    }

    pub(crate) fn with_cars(cars: Vec<Car>) -> Self {
        let api = Self::default();
        api.next_id.set(cars.len() as u32);
        *api.cars.borrow_mut() = cars;
        api
    }

    pub(crate) fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub(crate) fn failing_deletes(mut self) -> Self {
        self.failing_deletes = true;
        self
    }

    /// Read the bearer token from this store on every car call.
    pub(crate) fn set_token_source(&self, store: MemoryStore) {
        *self.token_source.borrow_mut() = Some(store);
    }

    pub(crate) fn last_bearer(&self) -> Option<String> {
        self.last_bearer.borrow().clone()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn car_ids(&self) -> Vec<String> {
        self.cars.borrow().iter().map(|c| c.id.clone()).collect()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if let Some(store) = self.token_source.borrow().as_ref() {
            *self.last_bearer.borrow_mut() = session::load_token(store);
        }
        if self.offline {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(())
    }

    fn not_found() -> ApiError {
        ApiError::from_status(404, r#"{"detail":"Car not found"}"#)
    }

    fn store_car(&self, id: String, input: &CarInput) -> Car {
        Car {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            car_type: input.car_type.clone(),
            company: input.company.clone(),
            dealer: input.dealer.clone(),
            tags: input.tags.clone(),
            images: input.images.clone(),
            owner_id: Some("owner".into()),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Cloneable handle for hooks that keep their own copy of the API.
#[derive(Clone)]
pub(crate) struct SharedApi(Rc<FakeApi>);

impl SharedApi {
    pub(crate) fn new(api: FakeApi) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for SharedApi {
    type Target = FakeApi;

    fn deref(&self) -> &FakeApi {
        &self.0
    }
}

impl CarApi for SharedApi {
    async fn list_cars(&self, search: &str) -> Result<Vec<Car>, ApiError> {
        self.0.list_cars(search).await
    }

    async fn get_car(&self, id: &str) -> CarLookup {
        self.0.get_car(id).await
    }

    async fn create_car(&self, input: &CarInput) -> Result<Car, ApiError> {
        self.0.create_car(input).await
    }

    async fn update_car(&self, id: &str, input: &CarInput) -> Result<Car, ApiError> {
        self.0.update_car(id, input).await
    }

    async fn delete_car(&self, id: &str) -> Result<(), ApiError> {
        self.0.delete_car(id).await
    }
}

pub(crate) fn car(id: &str, title: &str) -> Car {
    Car {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        car_type: "Sedan".into(),
        company: "Acme".into(),
        dealer: "Downtown".into(),
        tags: vec![],
        images: vec![],
        owner_id: Some("owner".into()),
        created_at: None,
        updated_at: None,
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        self.record(format!("login:{}", credentials.username))?;
        let ok = self
            .accounts
            .borrow()
            .iter()
            .any(|(e, p)| *e == credentials.username && *p == credentials.password);
        if ok {
            Ok(Token {
                access_token: format!("token-for-{}", credentials.username),
                token_type: "bearer".into(),
            })
        } else {
            Err(ApiError::from_status(
                401,
                r#"{"detail":"Incorrect username or password"}"#,
            ))
        }
    }

    async fn register(&self, user: &UserCreate) -> Result<UserInfo, ApiError> {
        self.record(format!("register:{}", user.email))?;
        let mut accounts = self.accounts.borrow_mut();
        if accounts.iter().any(|(e, _)| *e == user.email) {
            return Err(ApiError::from_status(
                400,
                r#"{"detail":"Email already registered"}"#,
            ));
        }
        accounts.push((user.email.clone(), user.password.clone()));
        Ok(UserInfo {
            id: format!("u{}", accounts.len()),
            email: user.email.clone(),
            username: user.username.clone(),
            is_active: true,
        })
    }
}

impl CarApi for FakeApi {
    async fn list_cars(&self, search: &str) -> Result<Vec<Car>, ApiError> {
        self.record(format!("list:{search}"))?;
        let needle = search.trim().to_lowercase();
        Ok(self
            .cars
            .borrow()
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.title.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
                    || c.tags.iter().any(|t| *t == search.trim())
            })
            .cloned()
            .collect())
    }

    async fn get_car(&self, id: &str) -> CarLookup {
        if let Err(e) = self.record(format!("get:{id}")) {
            return CarLookup::TransportError(e);
        }
        match self.cars.borrow().iter().find(|c| c.id == id) {
            Some(car) => CarLookup::Found(car.clone()),
            None => CarLookup::NotFound,
        }
    }

    async fn create_car(&self, input: &CarInput) -> Result<Car, ApiError> {
        self.record("create".to_string())?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let car = self.store_car(format!("c{id}"), input);
        self.cars.borrow_mut().push(car.clone());
        Ok(car)
    }

    async fn update_car(&self, id: &str, input: &CarInput) -> Result<Car, ApiError> {
        self.record(format!("update:{id}"))?;
        let mut cars = self.cars.borrow_mut();
        let Some(slot) = cars.iter_mut().find(|c| c.id == id) else {
            return Err(Self::not_found());
        };
        *slot = self.store_car(id.to_string(), input);
        Ok(slot.clone())
    }

    async fn delete_car(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"))?;
        if self.failing_deletes {
            return Err(ApiError::from_status(500, ""));
        }
        let mut cars = self.cars.borrow_mut();
        let before = cars.len();
        cars.retain(|c| c.id != id);
        if cars.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
