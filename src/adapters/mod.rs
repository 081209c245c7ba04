//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter                | Implements | Connects to          |
//! |------------------------|------------|----------------------|
//! | `log_sink`             | EventSink  | `log` facade         |
//! | `sensors::FixedSensor` | SensorPort | manual input         |
//! | `sensors::simulated`   | SensorPort | `rand` weather draws |

pub mod log_sink;
