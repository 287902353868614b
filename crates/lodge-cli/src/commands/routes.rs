use serde::Serialize;

use lodge_nav::RouteTable;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct RouteView<'a> {
    name: &'a str,
    path: &'a str,
    requires_auth: bool,
    required_roles: &'a [String],
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let table = RouteTable::hotel_default();
    let views: Vec<RouteView<'_>> = table
        .routes()
        .iter()
        .map(|route| RouteView {
            name: &route.name,
            path: &route.path,
            requires_auth: route.requires_auth,
            required_roles: &route.required_roles,
        })
        .collect();
    output(&views, flags.format)
}
