use crate::{
    auth::{
        generate_token, hash_password, verify_password, LoginRequest, LoginResponse,
        RegisterRequest,
    },
    config::AuthSettings,
    error::AppError,
    models::UserRecord,
    store::SharedStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Stores the user with a salted bcrypt hash of the password and returns the
/// public profile. The plaintext password is dropped here and never persisted.
#[post("/register")]
pub async fn register(
    store: web::Data<SharedStore>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    if store
        .find_user_by_email(&register_data.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(&register_data.password)?;

    let register_data = register_data.into_inner();
    let record = UserRecord::new(register_data.name, register_data.email, password_hash);
    let record = store.insert_user(record).await?;

    log::info!("registered user {}", record.id);

    Ok(HttpResponse::Created().json(record.profile()))
}

/// Login user
///
/// Issues a signed, time-limited bearer token. Unknown email and wrong
/// password produce the identical response, so callers cannot probe which
/// addresses have accounts.
#[post("/login")]
pub async fn login(
    store: web::Data<SharedStore>,
    settings: web::Data<AuthSettings>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    if let Some(record) = store.find_user_by_email(&login_data.email).await? {
        if verify_password(&login_data.password, &record.password_hash)? {
            let token = generate_token(
                record.id,
                &settings.jwt_secret,
                settings.token_ttl_hours,
            )?;
            return Ok(HttpResponse::Ok().json(LoginResponse {
                user: record.profile(),
                token,
            }));
        }
    }

    Err(AppError::Authentication("Invalid credentials".into()))
}
