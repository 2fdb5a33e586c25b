// Inclusion (<, <=, >, >=) et prédicats nommés
pub mod pm_order;
