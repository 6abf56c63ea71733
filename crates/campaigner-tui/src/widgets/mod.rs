//! Custom widget components

mod alert_modal;
mod campaign_form;
mod footer;
mod header;
pub mod modal_overlay;
mod preview_modal;
mod success_view;

pub use alert_modal::AlertModal;
pub use campaign_form::CampaignFormView;
pub use footer::Footer;
pub use header::MainHeader;
pub use preview_modal::PreviewModal;
pub use success_view::SuccessView;
