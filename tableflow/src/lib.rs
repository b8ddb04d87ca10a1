//! TableFlow - 单桌点单状态存储
//!
//! # 架构概述
//!
//! 本 crate 持有一个餐桌会话 (桌型、座位、客人、点单) 的全部状态，
//! 对外提供命名的变更操作、快照读取和变更订阅，并把状态持久化到
//! 本地 redb 键值槽位中。
//!
//! # 模块结构
//!
//! ```text
//! tableflow/src/
//! ├── core/          # 配置
//! ├── utils/         # 日志、输入校验
//! └── tables/        # 状态存储: 操作、持久化、订阅
//! ```
//!
//! # Data Flow
//!
//! ```text
//! TableCommand → TableStore → CommandAction → next AppState
//!                    ↓                             ↓
//!               StateStorage (redb)         Subscribers / watchers
//! ```

pub mod core;
pub mod tables;
pub mod utils;

// Re-export 公共类型
pub use core::Config;
pub use tables::{
    ManagerError, ManagerResult, RedbStorage, StateStorage, StorageError, SubscriptionId,
    TableError, TableStore,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
