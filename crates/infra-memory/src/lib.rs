// Respmodel Infrastructure - In-Memory Adapter
// Implements: UserRepository (process-lifetime, append-only)

mod user_repository;

pub use user_repository::InMemoryUserRepository;
