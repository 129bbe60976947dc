//! Network glue: WiFi association and SNTP time sync
//!
//! The core never touches the network; it only decides *when* a sync is
//! due. These modules do the actual work when the sync task is asked.

pub mod sntp;
pub mod wifi;
