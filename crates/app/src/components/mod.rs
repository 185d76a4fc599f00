pub mod bills_table;
pub mod dialogs;
pub mod layout;
pub mod member_table;
pub mod toast;
pub mod ui;

pub use layout::{DashboardShell, Portal};
pub use toast::use_toast;
pub use ui::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton, StatsCard, Tone};
