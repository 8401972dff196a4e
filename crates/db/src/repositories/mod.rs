pub mod lookup_repo;
pub mod note_repo;
pub mod perfume_repo;

pub use lookup_repo::LookupRepo;
pub use note_repo::NoteRepo;
pub use perfume_repo::PerfumeRepo;
