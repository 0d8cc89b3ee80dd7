//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything except `login_form` is a pure props-to-markup mapping that may
//! invoke host callbacks. `login_form` delegates its behavior to
//! `auth::LoginFormController`.

pub mod button;
pub mod cards;
pub mod data;
pub mod filters;
pub mod layout;
pub mod login_form;
pub mod stats;
pub mod terminal;

pub use button::{ActionButtons, Button, ButtonGroup};
pub use cards::{AppCard, AssessmentCard, ReportCard};
pub use data::{ActivityFeed, ActivityItem, DataCard, DataGrid};
pub use filters::{FilterPanel, FilterSelect, SearchInput};
pub use layout::{AppFooter, AppHeader, PageLayout, PageSection};
pub use login_form::LoginForm;
pub use stats::{ProgressBar, StatCard, StatsGrid, StatusBadge};
pub use terminal::{TerminalPrompt, TerminalWindow};
