mod requests;
pub mod services;
mod token;
mod types;

pub use requests::{
    AuthenticateUserRequest, CreateUserRequest, UpdateUserAvatarRequest, UpdateUserProfileRequest,
};
pub use services::{
    AuthenticateUserService, AuthenticatedUser, CreateUserService, ListProvidersService,
    ShowProfileService, UpdateUserAvatarService, UpdateUserProfileService,
};
pub use token::{sign_token, verify_token, TokenClaims, TokenConfig, TokenError};
pub use types::User;
