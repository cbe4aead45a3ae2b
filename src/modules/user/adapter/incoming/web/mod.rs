pub mod routes;
mod views;
