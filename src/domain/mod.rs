// Domain layer: result models shared by the calculator operations.

pub mod model;
