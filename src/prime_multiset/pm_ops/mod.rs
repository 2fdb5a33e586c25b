// Opérateurs &, |, +, - et leurs formes composées
pub mod pm_ops;
