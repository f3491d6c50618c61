mod account;
mod follows;
mod post_detail;
mod reactions;
