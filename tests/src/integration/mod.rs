//! Cross-module flows through `EntanglementService`.

pub mod entanglement_flow;
