/// Inbound ports (Driving ports) - Application API
mod nvd_search_port;

pub use nvd_search_port::NvdSearchPort;
