pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod catalog {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

#[cfg(test)]
pub mod test_support;
