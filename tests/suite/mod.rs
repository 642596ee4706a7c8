mod contact_form;
mod disclosure;
mod keyboard;
mod preferences;
mod rendering;
