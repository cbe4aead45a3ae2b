use std::sync::Arc;

use actix_web::web;

use crate::tests::support::stubs::*;
use crate::upload::application::{
    domain::policies::UploadPolicy, ports::incoming::use_cases::StoreImageUseCase,
};
use crate::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, FetchUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
    fetch_user: Arc<dyn FetchUserUseCase + Send + Sync>,
    update_user: Arc<dyn UpdateUserUseCase + Send + Sync>,
    delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    store_image: Arc<dyn StoreImageUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_users: Arc::new(StubListUsersUseCase::success(vec![])),
            create_user: Arc::new(StubCreateUserUseCase::default()),
            fetch_user: Arc::new(StubFetchUserUseCase::default()),
            update_user: Arc::new(StubUpdateUserUseCase::default()),
            delete_user: Arc::new(StubDeleteUserUseCase::default()),
            store_image: Arc::new(StubStoreImageUseCase::default()),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_create_user(
        mut self,
        uc: impl CreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl FetchUserUseCase + Send + Sync + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(
        mut self,
        uc: impl UpdateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_delete_user(
        mut self,
        uc: impl DeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_store_image(
        mut self,
        uc: impl StoreImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.store_image = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            list_users_use_case: self.list_users,
            create_user_use_case: self.create_user,
            fetch_user_use_case: self.fetch_user,
            update_user_use_case: self.update_user,
            delete_user_use_case: self.delete_user,
            store_image_use_case: self.store_image,
            upload_policy: self.upload_policy,
        })
    }
}
