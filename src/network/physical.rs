use core::fmt;

use rust_decimal::Decimal;

use crate::{vne_core::parameters::LOAD_EPSILON, LinkId, NodeId};

/// 物理ノード
///
/// Load is only mutated through [`add_load`](PhysicalNode::add_load) /
/// [`remove_load`](PhysicalNode::remove_load), which the substrate network
/// exposes to the mapping ledger.
#[derive(Debug, Clone)]
pub struct PhysicalNode {
    pub id: NodeId,
    pub capacity: f64,
    load: f64,
    /// Probability that the node stays operational while hosting.
    pub availability: Decimal,
    /// Probability used when the node only forwards traffic without hosting
    /// an endpoint.
    pub intermediary_availability: Decimal,
}

impl fmt::Display for PhysicalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}: CPU {}/{}", self.id, self.load, self.capacity)
    }
}

impl PhysicalNode {
    pub fn new(
        id: usize,
        capacity: f64,
        availability: f64,
        intermediary_availability: f64,
    ) -> Self {
        Self {
            id: NodeId::new(id),
            capacity,
            load: 0.0,
            availability: probability(availability),
            intermediary_availability: probability(intermediary_availability),
        }
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.load
    }

    pub(super) fn add_load(&mut self, amount: f64) {
        self.load += amount;
    }

    pub(super) fn remove_load(&mut self, amount: f64) {
        let next = self.load - amount;
        // A negative load means a release without a matching placement.
        assert!(
            next >= -LOAD_EPSILON,
            "load underflow on node {}: {} - {}",
            self.id,
            self.load,
            amount
        );
        self.load = next;
    }
}

/// 物理リンク
#[derive(Debug, Clone)]
pub struct PhysicalLink {
    pub id: LinkId,
    pub src: NodeId,
    pub dst: NodeId,
    pub bandwidth_capacity: f64,
    bandwidth_load: f64,
    pub cost: f64,
    pub delay: f64,
    /// Probability that the link stays operational.
    pub availability: Decimal,
}

impl fmt::Display for PhysicalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Link {}: BW {}/{}",
            self.id, self.bandwidth_load, self.bandwidth_capacity
        )
    }
}

impl PhysicalLink {
    pub fn new(
        src: usize,
        dst: usize,
        bandwidth_capacity: f64,
        cost: f64,
        delay: f64,
        availability: f64,
    ) -> Self {
        Self {
            id: LinkId::between(src, dst),
            src: NodeId::new(src),
            dst: NodeId::new(dst),
            bandwidth_capacity,
            bandwidth_load: 0.0,
            cost,
            delay,
            availability: probability(availability),
        }
    }

    pub fn bandwidth_load(&self) -> f64 {
        self.bandwidth_load
    }

    pub fn remaining_bandwidth(&self) -> f64 {
        self.bandwidth_capacity - self.bandwidth_load
    }

    pub(super) fn add_bandwidth_load(&mut self, amount: f64) {
        self.bandwidth_load += amount;
    }

    pub(super) fn remove_bandwidth_load(&mut self, amount: f64) {
        let next = self.bandwidth_load - amount;
        assert!(
            next >= -LOAD_EPSILON,
            "bandwidth load underflow on link {}: {} - {}",
            self.id,
            self.bandwidth_load,
            amount
        );
        self.bandwidth_load = next;
    }
}

/// 確率値をDecimalへ変換する
fn probability(value: f64) -> Decimal {
    match Decimal::try_from(value) {
        Ok(d) if d >= Decimal::ZERO && d <= Decimal::ONE => d,
        _ => panic!("availability must be a probability in [0, 1]: {value}"),
    }
}
