mod helpers;
mod root;
mod status;
