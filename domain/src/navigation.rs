//! Hash routes of the application and the navigation callback.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    EmployeeBills,
    NewBill,
    AdminDashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Login,
        Route::EmployeeBills,
        Route::NewBill,
        Route::AdminDashboard,
    ];

    /// Destination token passed to the navigation callback
    pub fn as_token(&self) -> &'static str {
        match self {
            Route::Login => "",
            Route::EmployeeBills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::AdminDashboard => "#admin/dashboard",
        }
    }

    pub fn from_token(token: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.as_token() == token)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Changes the visible view
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<F> Navigator for F
where
    F: Fn(Route),
{
    fn navigate(&self, route: Route) {
        self(route)
    }
}
