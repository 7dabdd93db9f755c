//! Application services for the task board.

mod board;
mod snapshot;

pub use board::{BoardLane, Mutation, TaskBoard, TaskBoardError, TaskBoardResult};
pub use snapshot::{
    SnapshotError, SnapshotLoad, SnapshotResult, TaskSnapshotStore, decode_snapshot, encode_snapshot,
};
