mod duplication;

pub use duplication::DuplicationError;
pub use duplication::DuplicationManager;
pub use duplication::DuplicationStage;
pub use duplication::copy_name;
