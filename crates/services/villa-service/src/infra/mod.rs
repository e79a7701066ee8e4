//! Infrastructure layer - database and hosted RPC access.

mod db;
pub mod supabase;

pub use db::Database;
pub use supabase::{RpcClient, RpcError, SupabaseClient};
