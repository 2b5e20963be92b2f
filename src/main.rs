//! tickbook - demo binary
//!
//! Drives a small order flow through the book and prints the results.
//! Useful as a smoke test that the crate builds and matches correctly.

use tickbook::{Order, OrderBook, PlaceResult, Side};

fn report(label: &str, result: &PlaceResult) {
    match result {
        PlaceResult::Accepted(exec) => {
            println!("{label}: accepted, {} resting", exec.resting);
            for fill in &exec.fills {
                println!(
                    "  filled {} @ {} against order {}",
                    fill.quantity, fill.price, fill.maker_id
                );
            }
        }
        other => println!("{label}: rejected ({other:?})"),
    }
}

fn main() {
    println!("===========================================");
    println!("  tickbook - limit order book demo");
    println!("===========================================");
    println!();

    let mut book = OrderBook::with_capacity(1024);

    report("buy 10 @ 100", &book.place(Order::new(1, Side::Buy, 100, 10)));
    report("buy 5 @ 100", &book.place(Order::new(2, Side::Buy, 100, 5)));
    report("sell 7 @ 101", &book.place(Order::new(3, Side::Sell, 101, 7)));
    println!();
    println!(
        "book: best bid {:?}, best ask {:?}, spread {:?}",
        book.best_bid(),
        book.best_ask(),
        book.spread()
    );
    println!();

    // A crossing sell sweeps the bid queue oldest-first
    report("sell 12 @ 100", &book.place(Order::new(4, Side::Sell, 100, 12)));
    println!();
    println!(
        "book: best bid {:?}, bid volume @100 = {}",
        book.best_bid(),
        book.volume_at_price(Side::Buy, 100)
    );

    println!();
    println!("cancel order 2: {:?}", book.cancel(2));
    println!("cancel order 2 again: {:?}", book.cancel(2));
    println!();
    println!(
        "final book: {} resting orders, depth {:?}",
        book.order_count(),
        book.depth(3)
    );
}
