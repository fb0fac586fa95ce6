#![allow(non_snake_case)]
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

#[cfg(feature = "server")]
use dioxus::logger::tracing::{error, info};

#[cfg(feature = "server")]
mod api;
mod chart;
#[cfg(feature = "server")]
mod config;
mod cost;
mod models;
mod state;
mod utils;

use models::{BreakEven, CarField, CarRowProps, CostCurve, FuelPrices, FuelType, SamplingRange};
use state::CarList;
use utils::{format_euros, format_km, format_thousands, parse_decimal};

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},

    #[route("/about")]
    About {},
}

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {}", e);
    }

    #[cfg(feature = "server")]
    {
        if let Err(e) = dotenvy::dotenv() {
            info!(".env not found: {}", e);
        }

        let config = match config::AppConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                error!("Bad configuration: {}", e);
                std::process::exit(1);
            }
        };

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Failed to start tokio runtime: {}", e);
                std::process::exit(1);
            }
        };

        if let Err(e) = runtime.block_on(serve(config)) {
            error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    launch(App);
}

#[cfg(feature = "server")]
async fn serve(config: config::AppConfig) -> std::io::Result<()> {
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    let app = axum::Router::new()
        .serve_dioxus_application(ServeConfig::builder(), App)
        .merge(api::router(config));

    axum::serve(listener, app).await
}

fn App() -> Element {
    rsx! {
        link { rel: "stylesheet", href: asset!("/assets/style.css") }
        Router::<Route> {}
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "nav-brand",
                Link { to: Route::Home {}, "Car Cost Comparison" }
            }
            div { class: "nav-links",
                Link { to: Route::Home {}, class: "nav-item", "Compare" }
                Link { to: Route::About {}, class: "nav-item", "About" }
            }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let mut petrol_price = use_signal(|| models::DEFAULT_PETROL_PRICE.to_string());
    let mut diesel_price = use_signal(|| models::DEFAULT_DIESEL_PRICE.to_string());
    let mut cars = use_signal(CarList::new);

    // Recomputed from scratch on every render.
    let prices = FuelPrices {
        petrol: parse_decimal(&petrol_price()),
        diesel: parse_decimal(&diesel_price()),
    };
    let range = SamplingRange::default();
    let list = cars();
    let comparison = cost::compare(list.cars(), &prices, &range);
    let can_remove = list.can_remove();

    rsx! {
        div { style: "display: flex; flex-direction: column; min-height: 100vh;",
            div { class: "page-container",
                div { class: "content-card",
                    h1 { "Car Cost Comparison" }

                    div { class: "price-row",
                        div { class: "control-group",
                            label { "Petrol Price (€/L)" }
                            input {
                                class: "modern-input",
                                type: "number",
                                step: "0.01",
                                value: "{petrol_price}",
                                oninput: move |e| petrol_price.set(e.value())
                            }
                        }
                        div { class: "control-group",
                            label { "Diesel Price (€/L)" }
                            input {
                                class: "modern-input",
                                type: "number",
                                step: "0.01",
                                value: "{diesel_price}",
                                oninput: move |e| diesel_price.set(e.value())
                            }
                        }
                    }

                    h2 { "Cars" }
                    table { class: "car-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Buy Price (€)" }
                                th { "Liters/100km" }
                                th { "Fuel Type" }
                                th { "Remove" }
                            }
                        }
                        tbody {
                            for (index, car) in list.cars().iter().enumerate() {
                                CarRow {
                                    key: "{car.id}",
                                    index: index,
                                    car: car.clone(),
                                    can_remove: can_remove,
                                    cars: cars
                                }
                            }
                        }
                    }
                    button {
                        class: "modern-button add-button",
                        title: "Add car",
                        onclick: move |_| {
                            let next = cars.read().with_car_added();
                            cars.set(next);
                        },
                        "➕ Add Car"
                    }

                    hr {}
                    h2 { "Cost Plot" }
                    CostChart { curves: comparison.curves.clone(), range: range }

                    if !comparison.break_evens.is_empty() {
                        BreakEvenList { points: comparison.break_evens.clone() }
                    }
                }
            }
            Footer {}
        }
    }
}

#[component]
fn CarRow(props: CarRowProps) -> Element {
    let index = props.index;
    let car = props.car;
    let mut cars = props.cars;

    let mut edit = move |field: CarField, value: String| {
        let next = cars.read().with_field_updated(index, field, &value);
        cars.set(next);
    };

    let handle_remove = move |_| {
        let next = cars.read().with_car_removed(index);
        if let Some(next) = next {
            cars.set(next);
        }
    };

    rsx! {
        tr {
            td {
                input {
                    class: "modern-input",
                    type: "text",
                    value: "{car.name}",
                    oninput: move |e| edit(CarField::Name, e.value())
                }
            }
            td {
                input {
                    class: "modern-input",
                    type: "number",
                    value: "{car.buy_price}",
                    oninput: move |e| edit(CarField::BuyPrice, e.value())
                }
            }
            td {
                input {
                    class: "modern-input",
                    type: "number",
                    step: "0.1",
                    value: "{car.liters_per_100km}",
                    oninput: move |e| edit(CarField::LitersPer100km, e.value())
                }
            }
            td {
                select {
                    class: "modern-input",
                    value: car.fuel_type.as_str(),
                    onchange: move |e| edit(CarField::FuelType, e.value()),
                    for fuel in [FuelType::Petrol, FuelType::Diesel] {
                        option {
                            value: fuel.as_str(),
                            selected: fuel == car.fuel_type,
                            {fuel.label()}
                        }
                    }
                }
            }
            td { class: "text-center",
                button {
                    class: "remove-button",
                    title: "Remove car",
                    disabled: !props.can_remove,
                    onclick: handle_remove,
                    "🗑"
                }
            }
        }
    }
}

#[component]
fn CostChart(curves: Vec<CostCurve>, range: SamplingRange) -> Element {
    let scale = chart::ChartScale::fit(&curves, &range);
    let left = chart::MARGIN_LEFT;
    let right = chart::WIDTH - chart::MARGIN_RIGHT;
    let top = chart::MARGIN_TOP;
    let bottom = chart::HEIGHT - chart::MARGIN_BOTTOM;
    let view_box = format!("0 0 {} {}", chart::WIDTH, chart::HEIGHT);

    let y_ticks: Vec<(f64, f64, String)> = scale
        .y_ticks()
        .into_iter()
        .zip(scale.y_tick_labels())
        .map(|(tick, label)| {
            let y = scale.y(tick);
            (y, y + 4.0, label)
        })
        .collect();
    let x_ticks: Vec<(f64, String)> = scale
        .x_ticks()
        .into_iter()
        .map(|tick| (scale.x(tick), format_thousands(tick.round() as u64)))
        .collect();
    let lines: Vec<(String, String)> = curves
        .iter()
        .map(|curve| (chart::polyline_points(curve, &scale), curve.color.clone()))
        .collect();

    let y_label_x = left - 8.0;
    let x_label_y = bottom + 18.0;
    let mid_x = (left + right) / 2.0;
    let mid_y = (top + bottom) / 2.0;
    let title_y = chart::HEIGHT - 8.0;
    let y_title_transform = format!("rotate(-90 16 {})", mid_y);

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "Total Cost vs. Kilometers Driven" }
            div { class: "chart-legend",
                for (i, curve) in curves.iter().enumerate() {
                    span { key: "{i}", class: "legend-item",
                        span { class: "legend-swatch", style: "background-color: {curve.color};" }
                        "{curve.label}"
                        if let Some(last) = curve.points.last() {
                            span { class: "legend-total", " ({format_euros(last.cost)})" }
                        }
                    }
                }
            }
            svg { class: "chart-svg", view_box: "{view_box}",
                for (y, label_y, label) in y_ticks {
                    line { x1: "{left}", x2: "{right}", y1: "{y}", y2: "{y}", class: "grid-line" }
                    text { x: "{y_label_x}", y: "{label_y}", text_anchor: "end", class: "tick-label", "{label}" }
                }
                for (x, label) in x_ticks {
                    line { x1: "{x}", x2: "{x}", y1: "{top}", y2: "{bottom}", class: "grid-line" }
                    text { x: "{x}", y: "{x_label_y}", text_anchor: "middle", class: "tick-label", "{label}" }
                }

                line { x1: "{left}", x2: "{right}", y1: "{bottom}", y2: "{bottom}", class: "axis-line" }
                line { x1: "{left}", x2: "{left}", y1: "{top}", y2: "{bottom}", class: "axis-line" }

                for (i, (points, color)) in lines.into_iter().enumerate() {
                    polyline {
                        key: "{i}",
                        points: "{points}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "2",
                    }
                }

                text { x: "{mid_x}", y: "{title_y}", text_anchor: "middle", class: "axis-title", "Kilometers Driven" }
                text {
                    x: "16",
                    y: "{mid_y}",
                    text_anchor: "middle",
                    transform: "{y_title_transform}",
                    class: "axis-title",
                    "Total Cost (€)"
                }
            }
        }
    }
}

#[component]
fn BreakEvenList(points: Vec<BreakEven>) -> Element {
    rsx! {
        div { class: "break-even",
            h3 { "Break-even Points" }
            ul {
                for (i, point) in points.iter().enumerate() {
                    li { key: "{i}",
                        "{point.car_a} and {point.car_b} break even at "
                        b { "{format_km(point.distance_km)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    const ABOUT_HTML: &str = include_str!("../assets/about.html");
    rsx! {
        div {
            dangerous_inner_html: "{ABOUT_HTML}"
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div {
                    h3 { style: "margin: 0;", "Car Cost Comparison" }
                    p { class: "footer-note", "Linear cost model: purchase price plus fuel per kilometer." }
                }
                div { style: "display: flex; gap: 20px;",
                    a { href: "/about", class: "footer-link", "About" }
                }
            }
        }
    }
}
