// 宝可梦数据模块
// 开发心理：推断引擎只需要种族的基础三围，按名称或图鉴编号解析
// 设计原则：数据驱动，静态只读，启动时一次性构建

pub mod species;

pub use species::{find_by_name, get, Species, SpeciesId};
