use actix_multipart::Multipart;
use actix_web::{
    dev::Payload, post, web, FromRequest, HttpMessage, HttpRequest, HttpResponse, Responder,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::{
    shared::web::{FlashMessage, FlashSession, PageResponse},
    upload::adapter::incoming::web::accept_upload,
    user::application::{
        domain::entities::UserId,
        ports::incoming::use_cases::{UpdateUserCommand, UpdateUserError},
    },
    AppState,
};

const URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// Edit form submitted without a file input.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateUserForm {
    name: String,
    email: String,
    phone: String,
    old_image: String,
}

impl UpdateUserForm {
    fn into_command(self, id: UserId) -> UpdateUserCommand {
        UpdateUserCommand {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            new_image: None,
            old_image: self.old_image,
        }
    }
}

/// Accepts `multipart/form-data` (optional `image` file) and plain
/// url-encoded bodies, which never carry a new image.
#[post("/update/{id}")]
pub async fn update_user_handler(
    req: HttpRequest,
    path: web::Path<String>,
    flash: FlashSession,
    body: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut payload = body.into_inner();
    let raw_id = path.into_inner();
    let Ok(id) = raw_id.parse::<UserId>() else {
        warn!(id = %raw_id, "Update requested for malformed id");
        return flash.redirect(FlashMessage::danger("User not found!"), "/");
    };

    let command = if req.content_type() == URL_ENCODED {
        match web::Form::<UpdateUserForm>::from_request(&req, &mut payload).await {
            Ok(form) => form.into_inner().into_command(id),
            Err(e) => {
                warn!(user_id = %id, error = %e, "Malformed update form");
                return PageResponse::bad_request(&e.to_string());
            }
        }
    } else {
        match read_multipart(&req, payload, id, &data).await {
            Ok(command) => command,
            Err(rejection) => return rejection,
        }
    };

    match data.update_user_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User updated");
            flash.redirect(FlashMessage::success("User updated successfully!"), "/")
        }
        Err(UpdateUserError::UserNotFound) => {
            warn!(user_id = %id, "Update requested for unknown user");
            flash.redirect(FlashMessage::danger("User not found!"), "/")
        }
        Err(UpdateUserError::RepositoryError(msg)) => {
            error!(user_id = %id, error = %msg, "Failed to update user");
            PageResponse::internal_error(&msg)
        }
    }
}

async fn read_multipart(
    req: &HttpRequest,
    payload: Payload,
    id: UserId,
    data: &AppState,
) -> Result<UpdateUserCommand, HttpResponse> {
    let mut upload = accept_upload(
        Multipart::new(req.headers(), payload),
        &data.upload_policy,
        data.store_image_use_case.as_ref(),
    )
    .await
    .map_err(|rejection| rejection.into_response())?;

    Ok(UpdateUserCommand {
        id,
        name: upload.form.text("name"),
        email: upload.form.text("email"),
        phone: upload.form.text("phone"),
        new_image: upload.image.take().map(|image| image.file_name),
        old_image: upload.form.text("old_image"),
    })
}
