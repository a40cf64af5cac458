mod command;
mod error;
mod export;
mod import;
mod modifier;
mod query;
mod types;

pub use command::*;
pub use error::*;
pub use export::*;
pub use import::*;
pub use modifier::*;
pub use query::{
    CategoryNode, FetchOptions, ItemNode, MenuAggregate, MenuNode, Modifiers, Query,
    SideCategoryNode, SideNode, parse_partner_id,
};
pub use types::*;
