use yew::prelude::*;

/// Placeholder shown while a routed page is suspended.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div class="page-loader">
            <div class="page-loader-spinner"></div>
            <style>
                {r#"
                .page-loader {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .page-loader-spinner {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 4px solid #2a2a2a;
                    border-top-color: #faff01;
                    animation: spin 0.8s linear infinite;
                }
                "#}
            </style>
        </div>
    }
}
