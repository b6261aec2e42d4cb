pub mod app;

pub mod common {
    pub mod error;
    pub mod event;
    pub mod logging;
    pub mod money;
}

pub mod domain {
    pub mod balance;
    pub mod expense;
    pub mod ledger;
    pub mod member;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod worker {
    pub mod processor;

    pub mod handlers {
        pub mod add_expense;
        pub mod add_member;
    }
}
