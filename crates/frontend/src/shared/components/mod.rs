pub mod action_buttons;
pub mod notification;
pub mod page_header;
pub mod split_pane;
pub mod tabs;
pub mod transition;
pub mod ui;

pub use action_buttons::{ActionButtons, PromptAndProceed, StepAction};
pub use notification::{FadingNotification, Notification, NotificationKind};
pub use page_header::PageHeader;
pub use split_pane::SplitPane;
pub use tabs::{Tab, TabDescriptor, TabPanel, TabValue, Tabs};
pub use transition::{Fade, FadeInLeft, Transition, TransitionPhase};
