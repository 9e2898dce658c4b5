pub mod detection;
pub mod fridge;
pub mod health;
pub mod image_upload;
pub mod recipe;
pub mod server;
#[cfg(test)]
mod test;
