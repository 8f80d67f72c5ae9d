pub mod feedback_form;
