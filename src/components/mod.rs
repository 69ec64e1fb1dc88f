pub mod app;
pub mod control_panel;
pub mod dashboard;
pub mod feature_card;
pub mod login_screen;
pub mod station_card;
pub mod stations;

pub use app::App;
pub use control_panel::ControlPanel;
pub use dashboard::Dashboard;
pub use feature_card::FeatureCard;
pub use login_screen::LoginScreen;
pub use station_card::StationCard;
pub use stations::Stations;
