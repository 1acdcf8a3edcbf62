//! VNE Simulator
//!
//! 仮想ネットワーク埋め込み (Virtual Network Embedding) の評価を行うプログラム
//!
//! Places virtual network requests onto a shared physical substrate, tracks
//! resource consumption, and derives a probabilistic availability score for
//! each embedding.

pub mod config;
pub mod controller;
pub mod debugger;
pub mod error;
pub mod mapping;
pub mod network;
pub mod request;
pub mod topology;
pub mod utils;
pub mod vne_core;

pub use vne_core::{LinkId, NodeId, VirtualLinkId, VirtualNodeId};
