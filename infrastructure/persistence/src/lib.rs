pub mod db;
pub mod cart {
    pub mod session_store;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod settings {
    pub mod entity;
    pub mod repository;
}
