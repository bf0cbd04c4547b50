mod activity;
mod handled_payment;
mod member;
mod unit_of_work;
