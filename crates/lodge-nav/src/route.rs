//! Route definitions and their authorization metadata.

/// A navigable view with its authorization requirements.
///
/// Metadata is fixed at table construction and never mutated at runtime.
#[derive(Debug, Clone)]
pub struct Route {
    /// Display name, matching the app's menu labels.
    pub name: String,
    /// In-app path.
    pub path: String,
    /// A valid session (token and user id) is required to enter.
    pub requires_auth: bool,
    /// Role labels of which the visitor must hold at least one. Empty means
    /// no role gate. A role gate is checked independently of
    /// `requires_auth`.
    pub required_roles: Vec<String>,
}

impl Route {
    /// A route anyone may visit.
    #[must_use]
    pub fn open(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            requires_auth: false,
            required_roles: Vec::new(),
        }
    }

    /// A route requiring a valid session.
    #[must_use]
    pub fn protected(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            ..Self::open(name, path)
        }
    }

    /// Gate this route on holding at least one of `roles`.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

/// The application's route set, static after construction.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Find a route by exact path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The hotel app's route set: public website pages, auth pages, and the
    /// staff dashboard with its role gates.
    #[must_use]
    pub fn hotel_default() -> Self {
        Self::new(vec![
            // Public website
            Route::open("Landing", "/"),
            Route::open("Home", "/pages/website/HomePage"),
            Route::open("Room Catalog", "/pages/website/RoomCatalog"),
            Route::open("Catalog", "/pages/Catalog"),
            Route::open("Booking", "/BookingPanel"),
            Route::protected("Profile", "/pages/website/ProfilePage"),
            Route::protected("Transaction History", "/pages/website/TransactionHistory"),
            // Auth pages
            Route::open("Login", "/pages/auth/login"),
            Route::open("Sign Up", "/auth/signup"),
            Route::open("Access Denied", "/auth/access"),
            Route::open("Error", "/auth/error"),
            Route::open("Not Found", "/pages/notfound"),
            // Staff dashboard
            Route::protected("Dashboard", "/Dashboard"),
            Route::protected("Room Control", "/Rooms/RoomControl")
                .with_roles(["Front Desk", "Manager"]),
            Route::protected("Room List", "/Rooms/RoomList"),
            Route::protected("Add Room", "/Rooms/AddRoom").with_roles(["Manager"]),
            Route::protected("Check In", "/Rooms/CheckIn")
                .with_roles(["Front Desk", "Manager"]),
            Route::protected("Check In List", "/Rooms/CheckInList"),
            Route::protected("Checkout List", "/Rooms/CheckoutList"),
            Route::protected("Damage Report", "/Rooms/DamageReport"),
            Route::protected("Canceled Booking", "/Rooms/CanceledBooking"),
            Route::protected("Cancelled Booking Admin", "/Rooms/CanceledBookingAdmin")
                .with_roles(["System Admin", "Manager"]),
            Route::protected("Front Desk Menu", "/FrontDeskMenu")
                .with_roles(["Front Desk", "Manager"]),
            Route::protected("Menu List", "/MenuList"),
            Route::protected("Kitchen Module", "/KitchenModule").with_roles(["Kitchen"]),
            Route::protected("Accounts Panel", "/Accounts/AccountsPanel")
                .with_roles(["System Admin"]),
            Route::protected("POS", "/POS/POS").with_roles(["Front Desk", "Manager"]),
            Route::protected("POS Extra", "/POS/Extra"),
            Route::protected("Invoice", "/POS/Invoice"),
            Route::protected("Room Invoice", "/POS/RoomInvoice"),
            Route::protected("Invoice Admin", "/POS/InvoiceAdmin")
                .with_roles(["System Admin", "Manager"]),
            Route::protected("Room Invoice Admin", "/POS/RoomInvoiceAdmin")
                .with_roles(["System Admin", "Manager"]),
            Route::protected("Consumable Form", "/Inventory/AddItems/ConsumableForm")
                .with_roles(["Manager", "Inventory"]),
            Route::protected("Non Consumable Form", "/Inventory/AddItems/NonConsumableForm")
                .with_roles(["Manager", "Inventory"]),
            Route::protected("View Inventory", "/Inventory/ViewInventory/ViewItems"),
            Route::protected("Manage Inventory", "/Inventory/ManageInventory/ManageItems")
                .with_roles(["Manager", "Inventory"]),
            Route::protected(
                "Inventory Summary",
                "/Inventory/GenerateReport/InventorySummary",
            ),
            Route::protected("Stock History", "/Inventory/GenerateReport/StockHistory"),
            Route::protected("Low Stock Report", "/Inventory/GenerateReport/LowstockReport"),
            Route::protected("Damaged Items", "/Inventory/GenerateReport/DamagedItems"),
            Route::protected("Expired Items", "/Inventory/GenerateReport/ExpiredItems"),
            Route::protected("Rate Page", "/Rates/RatePage").with_roles(["Manager"]),
        ])
    }
}
