//! Static navigation configuration for the LoomERP back-office.
//!
//! Build-time data, not runtime computation. Downstream shells may supply
//! their own table and tree; this is the stock layout.

use loomerp_auth::Resource;

use crate::menu::MenuNode;
use crate::routes::RouteTable;

/// Resource → route catalogue.
///
/// Table order matters for reverse lookup: the name the authentication
/// service emits today is listed before any historical alias, so legacy
/// names still resolve forward (`route_for`) without ever shadowing the
/// canonical entry.
pub fn default_route_table() -> RouteTable {
    let mut table = RouteTable::new();

    table.insert(Resource::new("Buyer"), "/buyers");
    table.insert(Resource::new("Supplier"), "/suppliers");
    // Historical name from the legacy import; superseded by "Supplier".
    table.insert(Resource::new("Vendor"), "/suppliers");
    table.insert(Resource::new("Branch"), "/branches");
    table.insert(Resource::new("Warehouse"), "/warehouses");
    table.insert(Resource::new("StockCount"), "/stock-counts");
    table.insert(Resource::new("Shipment"), "/shipments");
    table.insert(Resource::new("GoodsReceipt"), "/goods-receipts");
    table.insert(Resource::new("FabricOrder"), "/fabric-orders");
    table.insert(Resource::new("DyeLot"), "/dye-lots");
    table.insert(Resource::new("User"), "/users");
    table.insert(Resource::new("Role"), "/roles");

    table
}

/// The stock back-office menu tree.
pub fn default_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::heading("Partners"),
        MenuNode::link_with_icon("Buyers", "/buyers", "users"),
        MenuNode::link_with_icon("Suppliers", "/suppliers", "truck"),
        MenuNode::heading("Logistics"),
        MenuNode::link("Shipments", "/shipments"),
        MenuNode::link("Goods Receipts", "/goods-receipts"),
        MenuNode::submenu_with_icon(
            "Warehousing",
            "package",
            vec![
                MenuNode::link("Warehouses", "/warehouses"),
                MenuNode::link("Stock Counts", "/stock-counts"),
            ],
        ),
        MenuNode::heading("Production"),
        MenuNode::link("Fabric Orders", "/fabric-orders"),
        MenuNode::link("Dye Lots", "/dye-lots"),
        MenuNode::heading("Administration"),
        MenuNode::submenu_with_icon(
            "Access Control",
            "shield",
            vec![
                MenuNode::link("Users", "/users"),
                MenuNode::link("Roles", "/roles"),
            ],
        ),
        MenuNode::link("Branches", "/branches"),
    ]
}
