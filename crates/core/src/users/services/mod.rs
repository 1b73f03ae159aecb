//! Use cases around user accounts and sessions.

mod authenticate_user;
mod create_user;
mod list_providers;
mod show_profile;
mod update_avatar;
mod update_profile;

pub use authenticate_user::{AuthenticateUserService, AuthenticatedUser};
pub use create_user::CreateUserService;
pub use list_providers::ListProvidersService;
pub use show_profile::ShowProfileService;
pub use update_avatar::UpdateUserAvatarService;
pub use update_profile::UpdateUserProfileService;
