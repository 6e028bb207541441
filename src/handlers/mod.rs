// handlers/mod.rs - Handler tiers
//
// Two security tiers:
// Public (no auth, storefront reads) → Private (mutations, presumed gated
// by an external authentication filter in front of the service)

pub mod private; // Tier 2: /api/v1/private/* (externally gated writes)
pub mod public; // Tier 1: no authentication required (reads)
