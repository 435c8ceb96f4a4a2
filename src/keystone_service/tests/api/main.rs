mod account;
mod helpers;
mod login;
mod register;
