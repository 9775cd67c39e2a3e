//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `console`      | MotorPort          | Log output (simulation)  |
//! |                | CuePort            |                          |
//! | `config_file`  | ConfigPort         | JSON file on disk        |
//! | `log_sink`     | EventSink          | Log output               |

pub mod config_file;
pub mod console;
pub mod log_sink;
