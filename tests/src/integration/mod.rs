//! # Integration Flows
//!
//! - `adapter_flows`: [`SunriseStore`](sunrise_alt_da::SunriseStore) against the mock service
//! - `server_flows`: DA server `POST /put` → `GET /get/0x…` end to end

mod adapter_flows;
