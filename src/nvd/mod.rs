/// NVD query model - typed searches, their validation rules and wire encoding
pub mod domain;
pub mod policies;
