mod account;
mod league;
