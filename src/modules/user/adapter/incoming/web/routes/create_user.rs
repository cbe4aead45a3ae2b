use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::{
    shared::web::{FlashMessage, FlashSession, PageResponse},
    upload::adapter::incoming::web::accept_upload,
    user::application::ports::incoming::use_cases::{CreateUserCommand, CreateUserError},
    AppState,
};

#[post("/add")]
pub async fn create_user_handler(
    flash: FlashSession,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    // 1️⃣ Parse the form and persist the image
    let mut upload = match accept_upload(
        payload,
        &data.upload_policy,
        data.store_image_use_case.as_ref(),
    )
    .await
    {
        Ok(upload) => upload,
        Err(rejection) => return rejection.into_response(),
    };

    let Some(image) = upload.image.take() else {
        return PageResponse::bad_request("An image file is required");
    };

    let command = CreateUserCommand::new(
        upload.form.text("name"),
        upload.form.text("email"),
        upload.form.text("phone"),
        image.file_name,
    );

    // 2️⃣ Execute use case
    match data.create_user_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User created");
            flash.redirect(FlashMessage::success("User added successfully"), "/")
        }
        Err(CreateUserError::EmailAlreadyExists) => flash.redirect(
            FlashMessage::danger("User already exists with this email!"),
            "/add",
        ),
        Err(CreateUserError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to create user");
            PageResponse::internal_error(&msg)
        }
    }
}
