pub mod action_menu;
pub mod confirm_dialog;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod task_form;
pub mod task_list;
pub mod toast;
