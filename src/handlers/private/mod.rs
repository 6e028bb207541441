// handlers/private/mod.rs - Private handlers (externally gated)
//
// Mutating endpoints under /api/v1/private. Authentication is enforced by
// an external filter in front of this service, not here.

pub mod content;
