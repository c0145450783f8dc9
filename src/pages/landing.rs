use yew::prelude::*;

use crate::components::download_form::DownloadForm;
use crate::effects::counters::use_stats_counters;
use crate::effects::lazy::use_lazy_images;
use crate::effects::pointer::{on_book_tilt, on_book_tilt_reset, use_gradient_orbs};
use crate::effects::scroll::{scroll_to_section, use_parallax_icons, use_scroll_reveal};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_scroll_reveal();
    use_parallax_icons();
    use_gradient_orbs();
    use_stats_counters();
    use_lazy_images();

    let book_mousemove = on_book_tilt();
    let book_mouseleave = on_book_tilt_reset();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0f172a;
                        color: #e2e8f0;
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                        overflow-x: hidden;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 8rem 2rem 4rem;
                        overflow: hidden;
                    }
                    .hero-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        position: relative;
                        z-index: 1;
                    }
                    .hero-title {
                        font-size: 3rem;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(45deg, #fff, #a5b4fc);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        color: #94a3b8;
                        font-size: 1.15rem;
                        margin-bottom: 2.5rem;
                    }
                    .gradient-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(80px);
                        opacity: 0.45;
                        pointer-events: none;
                        transition: transform 0.2s ease-out;
                    }
                    .orb-1 { width: 420px; height: 420px; background: #6366f1; top: -120px; left: -80px; }
                    .orb-2 { width: 320px; height: 320px; background: #8b5cf6; bottom: -60px; right: 10%; }
                    .orb-3 { width: 260px; height: 260px; background: #10b981; top: 30%; right: -90px; }
                    .float-icon {
                        position: absolute;
                        font-size: 1.8rem;
                        opacity: 0.6;
                        pointer-events: none;
                    }
                    .hero-stats {
                        display: flex;
                        gap: 2.5rem;
                        margin-top: 3rem;
                    }
                    .stat-number {
                        font-size: 1.9rem;
                        font-weight: 700;
                        color: #fff;
                    }
                    .stat-label {
                        color: #94a3b8;
                        font-size: 0.9rem;
                    }
                    .book-3d {
                        perspective: 1000px;
                        display: flex;
                        justify-content: center;
                    }
                    .book-cover {
                        width: 260px;
                        height: 380px;
                        border-radius: 8px 16px 16px 8px;
                        background: linear-gradient(135deg, #6366f1, #8b5cf6);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        transform: rotateX(0) rotateY(-15deg);
                        transition: transform 0.1s ease-out;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        padding: 2rem;
                        text-align: center;
                    }
                    .section {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .section-title {
                        font-size: 2.2rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card, .chapter-card, .testimonial-card {
                        background: rgba(30, 41, 59, 0.7);
                        border: 1px solid rgba(99, 102, 241, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .chapter-number {
                        color: #6366f1;
                        font-weight: 700;
                        font-size: 0.85rem;
                        letter-spacing: 0.1em;
                    }
                    .testimonial-card img {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        margin-bottom: 1rem;
                        background: #1e293b;
                    }
                    .download-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 420px;
                        margin: 0 auto;
                    }
                    .form-input {
                        background: rgba(30, 41, 59, 0.9);
                        border: 2px solid transparent;
                        border-radius: 10px;
                        padding: 0.9rem 1.1rem;
                        color: #fff;
                        font-size: 1rem;
                        outline: none;
                        transition: border-color 0.2s ease;
                    }
                    .btn-submit {
                        position: relative;
                        background: linear-gradient(45deg, #6366f1, #8b5cf6);
                        color: #fff;
                        border: none;
                        border-radius: 10px;
                        padding: 1rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .btn-submit:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .btn-loading {
                        display: none;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .loading-spinner {
                        display: inline-block;
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .site-footer {
                        text-align: center;
                        color: #64748b;
                        padding: 2.5rem 1rem;
                        border-top: 1px solid rgba(148, 163, 184, 0.1);
                    }
                    @media (max-width: 768px) {
                        .hero-inner { grid-template-columns: 1fr; }
                        .hero-title { font-size: 2.2rem; }
                        .hero-stats { flex-wrap: wrap; gap: 1.5rem; }
                    }
                "#}
            </style>

            <header class="hero" id="hero">
                <div class="gradient-orb orb-1"></div>
                <div class="gradient-orb orb-2"></div>
                <div class="gradient-orb orb-3"></div>
                <span class="float-icon" style="top: 18%; left: 8%;">{"📚"}</span>
                <span class="float-icon" style="top: 32%; right: 12%;">{"✨"}</span>
                <span class="float-icon" style="bottom: 28%; left: 14%;">{"🚀"}</span>
                <span class="float-icon" style="bottom: 18%; right: 20%;">{"💡"}</span>

                <div class="hero-inner">
                    <div class="hero-copy">
                        <h1 class="hero-title">{"Ship Better Software, One Chapter at a Time"}</h1>
                        <p class="hero-subtitle">
                            {"A practical field guide to building modern web products, distilled from a decade of shipping. Get the first chapter free."}
                        </p>
                        <button
                            class="btn-submit"
                            style="max-width: 260px;"
                            onclick={Callback::from(|_: MouseEvent| scroll_to_section("#download"))}
                        >
                            {"Download Free Chapter"}
                        </button>
                        <div class="hero-stats">
                            <div class="stat">
                                <div class="stat-number">{"0"}</div>
                                <div class="stat-label">{"Readers"}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-number">{"0"}</div>
                                <div class="stat-label">{"Average rating"}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-number">{"0"}</div>
                                <div class="stat-label">{"Pages"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="book-3d" onmousemove={book_mousemove} onmouseleave={book_mouseleave}>
                        <div class="book-cover">
                            <h2>{"Ship Better Software"}</h2>
                            <p>{"The pragmatic web field guide"}</p>
                        </div>
                    </div>
                </div>
            </header>

            <section class="section" id="features">
                <h2 class="section-title">{"What's inside"}</h2>
                <div class="card-grid">
                    <div class="feature-card">
                        <h3>{"Battle-tested patterns"}</h3>
                        <p>{"Architecture decisions explained with the trade-offs that actually mattered in production."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Real-world case studies"}</h3>
                        <p>{"Post-mortems from launches that went sideways, and the fixes that saved them."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Hands-on exercises"}</h3>
                        <p>{"Every chapter ends with something to build, not just something to read."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Lifetime updates"}</h3>
                        <p>{"The web moves fast. The book moves with it, free for every reader."}</p>
                    </div>
                </div>
            </section>

            <section class="section" id="chapters">
                <h2 class="section-title">{"Chapters"}</h2>
                <div class="card-grid">
                    <div class="chapter-card">
                        <div class="chapter-number">{"CHAPTER 01"}</div>
                        <h3>{"Foundations that last"}</h3>
                        <p>{"Picking boring technology on purpose."}</p>
                    </div>
                    <div class="chapter-card">
                        <div class="chapter-number">{"CHAPTER 02"}</div>
                        <h3>{"Designing for failure"}</h3>
                        <p>{"Timeouts, retries, and the art of degrading gracefully."}</p>
                    </div>
                    <div class="chapter-card">
                        <div class="chapter-number">{"CHAPTER 03"}</div>
                        <h3>{"Shipping without fear"}</h3>
                        <p>{"Feature flags, canaries, and rollbacks you can trust."}</p>
                    </div>
                    <div class="chapter-card">
                        <div class="chapter-number">{"CHAPTER 04"}</div>
                        <h3>{"Scaling the team"}</h3>
                        <p>{"Code review culture that survives the tenth engineer."}</p>
                    </div>
                </div>
            </section>

            <section class="section" id="testimonials">
                <h2 class="section-title">{"What readers say"}</h2>
                <div class="card-grid">
                    <div class="testimonial-card">
                        <img data-src="/assets/readers/maya.jpg" alt="Maya R." />
                        <p>{"\"The chapter on graceful degradation paid for the book ten times over during our last incident.\""}</p>
                        <strong>{"Maya R., Staff Engineer"}</strong>
                    </div>
                    <div class="testimonial-card">
                        <img data-src="/assets/readers/tomas.jpg" alt="Tomas K." />
                        <p>{"\"Finally a book that treats deployment as part of the craft, not an afterthought.\""}</p>
                        <strong>{"Tomas K., Platform Lead"}</strong>
                    </div>
                    <div class="testimonial-card">
                        <img data-src="/assets/readers/amara.jpg" alt="Amara O." />
                        <p>{"\"I hand this to every new hire on my team. It shortcuts years of hard lessons.\""}</p>
                        <strong>{"Amara O., Engineering Manager"}</strong>
                    </div>
                </div>
            </section>

            <section class="section" id="download">
                <h2 class="section-title">{"Get the free chapter"}</h2>
                <p style="text-align: center; color: #94a3b8; margin-bottom: 2rem;">
                    {"Drop your name and email and the first chapter lands in your inbox."}
                </p>
                <DownloadForm />
            </section>

            <footer class="site-footer">
                <p>{"© 2026 Ship Better Software. All rights reserved."}</p>
            </footer>
        </div>
    }
}
