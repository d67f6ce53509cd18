//! One registry shared by independent parts of a program.
//!
//! Each "component" receives a clone of the registry and works only with the
//! store names it knows about, without any component owning a global store.

use canister::{StoreError, StoreRegistry};

fn cart_component(registry: &StoreRegistry<Vec<String>>) -> Result<(), StoreError> {
    let cart = registry.create_store("cart", vec!["apples".to_string()])?;
    println!("cart component sees: {:?}", cart.get_state());
    Ok(())
}

fn checkout_component(registry: &StoreRegistry<Vec<String>>) -> Result<(), StoreError> {
    if !registry.store_exists("cart") {
        println!("checkout: nothing to do");
        return Ok(());
    }
    let items = registry.destroy_store("cart")?;
    println!("checkout: purchased {:?}", items);
    Ok(())
}

fn main() -> Result<(), StoreError> {
    let registry = StoreRegistry::new();

    cart_component(&registry.clone())?;
    checkout_component(&registry.clone())?;

    assert!(!registry.store_exists("cart"));
    println!("registry is empty again");
    Ok(())
}
