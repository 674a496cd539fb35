//! UI components for the dashboard.

pub mod assets;
pub mod assign_modal;
pub mod asset_modal;
pub mod icons;
pub mod layout;
pub mod login;
pub mod overview;
pub mod primitives;
pub mod register;
pub mod users;

pub use assets::AssetsPage;
pub use layout::Shell;
pub use login::LoginPage;
pub use overview::OverviewPage;
pub use register::RegisterPage;
pub use users::UsersPage;
