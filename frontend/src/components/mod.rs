pub mod activity_card;
pub mod activity_list;
pub mod header;
pub mod message_banner;
pub mod signup_form;
