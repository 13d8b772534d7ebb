//! Global CSS styles for the SentraIntel desktop app.
//!
//! Dark gradient aesthetic: deep blue-black surfaces, cyan/violet gradient
//! accents, CSS transitions for all motion.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DARK (Backgrounds) */
  --dark: #0a0a0e;
  --dark-100: #0d0d13;
  --dark-200: #12121a;
  --dark-300: #1a1a24;

  /* BRAND */
  --primary: #0ea5e9;
  --secondary: #8b5cf6;
  --accent: #00aeef;

  /* TEXT */
  --text-primary: #f5f5f7;
  --text-secondary: rgba(245, 245, 247, 0.72);
  --text-muted: rgba(245, 245, 247, 0.45);

  /* SEMANTIC */
  --success: #16a34a;
  --border: rgba(120, 130, 150, 0.25);
  --border-soft: rgba(120, 130, 150, 0.15);

  --brand-gradient: linear-gradient(90deg, var(--accent), var(--primary), var(--secondary));
  --cta-gradient: linear-gradient(90deg, var(--primary), var(--secondary));
  --glow: 0 0 24px rgba(14, 165, 233, 0.35);
}

/* === Base === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
}

body {
  background: var(--dark);
  color: var(--text-primary);
  font-family: 'Inter', 'Segoe UI', -apple-system, sans-serif;
  font-size: 15px;
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.page-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page-main {
  flex: 1;
}

.container {
  max-width: 1180px;
  margin: 0 auto;
  padding: 0 24px;
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  background: var(--cta-gradient);
  color: #fff;
  font-weight: 500;
  padding: 12px 32px;
  border-radius: 8px;
  transition: box-shadow 0.3s ease, transform 0.3s ease;
}

.btn-primary:hover {
  box-shadow: var(--glow);
  transform: translateY(-1px);
}

.btn-secondary {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  background: var(--dark-200);
  border: 1px solid var(--border);
  color: #fff;
  font-weight: 500;
  padding: 12px 32px;
  border-radius: 8px;
  transition: background 0.3s ease;
}

.btn-secondary:hover {
  background: var(--dark-300);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(18, 18, 26, 0.85);
  backdrop-filter: blur(14px);
  border-bottom: 1px solid var(--border-soft);
}

.nav-inner {
  max-width: 1180px;
  margin: 0 auto;
  padding: 0 24px;
  height: 72px;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 12px;
}

.brand-mark {
  width: 38px;
  height: 38px;
  border-radius: 50%;
  background: rgba(10, 10, 14, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--accent);
  filter: drop-shadow(0 0 6px rgba(0, 174, 239, 0.4));
}

.brand-name {
  font-size: 1.35rem;
  font-weight: 700;
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  line-height: 1.2;
}

.brand-sub {
  display: block;
  font-size: 0.62rem;
  letter-spacing: 0.25em;
  color: var(--text-muted);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 4px;
}

.nav-link {
  padding: 8px 14px;
  border-radius: 6px;
  font-size: 0.9rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color 0.3s ease, background 0.3s ease;
}

.nav-link:hover {
  color: #fff;
  background: rgba(26, 26, 36, 0.5);
}

.nav-link.active {
  color: #fff;
  border-bottom: 2px solid var(--accent);
  border-radius: 6px 6px 0 0;
}

.nav-cta {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  margin-left: 12px;
  background: var(--cta-gradient);
  color: #fff;
  font-weight: 500;
  font-size: 0.9rem;
  padding: 10px 20px;
  border-radius: 8px;
  transition: box-shadow 0.3s ease;
}

.nav-cta:hover {
  box-shadow: var(--glow);
}

.menu-toggle-btn {
  color: var(--text-secondary);
  padding: 8px;
  border-radius: 6px;
}

.menu-toggle-btn:hover {
  color: #fff;
  background: var(--dark-300);
}

.compact-menu {
  background: linear-gradient(180deg, rgba(18, 18, 26, 0.97), rgba(26, 26, 36, 0.97));
  border-bottom: 1px solid var(--border-soft);
  padding: 12px 24px 24px;
}

.compact-menu-link {
  display: block;
  padding: 12px 16px;
  border-radius: 8px;
  font-weight: 500;
  color: var(--text-secondary);
  transition: background 0.2s ease, color 0.2s ease;
}

.compact-menu-link:hover {
  color: #fff;
  background: rgba(18, 18, 26, 0.7);
}

.compact-menu-link.active {
  color: #fff;
  background: linear-gradient(90deg, rgba(14, 165, 233, 0.15), rgba(139, 92, 246, 0.15));
  border-left: 2px solid var(--accent);
}

/* === Sections === */
.section {
  padding: 80px 0;
  background: var(--dark);
}

.section-alt {
  background: var(--dark-100);
}

.section-header {
  text-align: center;
  margin-bottom: 56px;
}

.section-title {
  font-size: 2.2rem;
  font-weight: 700;
  margin-bottom: 16px;
  background: linear-gradient(90deg, var(--accent), var(--secondary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-rule {
  width: 96px;
  height: 4px;
  margin: 0 auto 24px;
  border-radius: 2px;
  background: var(--cta-gradient);
}

.section-lead {
  max-width: 760px;
  margin: 0 auto;
  font-size: 1.05rem;
  color: var(--text-secondary);
}

/* === Hero === */
.hero {
  position: relative;
  padding: 110px 0 90px;
  background:
    radial-gradient(ellipse at 70% 20%, rgba(0, 174, 239, 0.12), transparent 55%),
    radial-gradient(ellipse at 20% 80%, rgba(139, 92, 246, 0.10), transparent 55%),
    var(--dark);
}

.hero-grid {
  display: grid;
  grid-template-columns: 1.1fr 0.9fr;
  gap: 48px;
  align-items: center;
}

.hero-title {
  font-size: 3.1rem;
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: 24px;
  color: #fff;
}

.hero-title-gradient {
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-copy {
  font-size: 1.1rem;
  color: var(--text-secondary);
  margin-bottom: 32px;
  max-width: 600px;
}

.hero-actions {
  display: flex;
  gap: 16px;
}

.hero-panel {
  position: relative;
  height: 420px;
  border-radius: 14px;
  border: 1px solid var(--border);
  background: linear-gradient(135deg, var(--dark-300), var(--dark));
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
}

.hero-panel-label {
  font-size: 1.5rem;
  font-weight: 700;
  background: linear-gradient(90deg, var(--accent), var(--secondary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-orb {
  position: absolute;
  border-radius: 50%;
  border: 1px solid rgba(0, 174, 239, 0.3);
}

.hero-orb.orb-a { top: 40px; left: 40px; width: 80px; height: 80px; }
.hero-orb.orb-b { bottom: 70px; right: 70px; width: 130px; height: 130px; border-color: rgba(14, 165, 233, 0.3); }
.hero-orb.orb-c { top: 50%; left: 50%; transform: translate(-50%, -50%); width: 170px; height: 170px; border-color: rgba(139, 92, 246, 0.3); }

/* === Feature / Tech Cards === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 24px;
}

.tech-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 28px;
}

.feature-card,
.tech-card {
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 12px;
  padding: 24px;
  transition: border-color 0.3s ease;
}

.feature-card:hover,
.tech-card:hover {
  border-color: rgba(0, 174, 239, 0.4);
}

.feature-icon,
.tech-icon {
  width: 52px;
  height: 52px;
  border-radius: 10px;
  background: linear-gradient(90deg, rgba(14, 165, 233, 0.2), rgba(139, 92, 246, 0.2));
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--accent);
  margin-bottom: 16px;
}

.card-heading {
  font-size: 1.15rem;
  font-weight: 600;
  color: #fff;
  margin-bottom: 8px;
}

.card-text {
  color: var(--text-muted);
  font-size: 0.92rem;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 48px;
  align-items: center;
  margin-bottom: 56px;
}

.vision-quote {
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 14px;
  padding: 40px;
  font-style: italic;
  font-size: 1.1rem;
  color: var(--text-secondary);
}

.vision-attribution {
  margin-top: 16px;
  text-align: right;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.check-list {
  list-style: none;
  margin-top: 16px;
}

.check-item {
  display: flex;
  align-items: flex-start;
  gap: 12px;
  margin-bottom: 10px;
  color: var(--text-secondary);
}

.check-dot {
  flex-shrink: 0;
  width: 20px;
  height: 20px;
  margin-top: 3px;
  border-radius: 50%;
  background: var(--cta-gradient);
  color: #fff;
  font-size: 0.7rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.prose-heading {
  font-size: 1.5rem;
  font-weight: 700;
  color: #fff;
  margin-bottom: 16px;
}

.prose {
  color: var(--text-secondary);
  margin-bottom: 16px;
}

/* === Solutions === */
.solution-tabs {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 16px;
  margin-bottom: 40px;
}

.solution-tab {
  display: flex;
  align-items: center;
  gap: 16px;
  padding: 16px;
  border-radius: 10px;
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  text-align: left;
  transition: background 0.3s ease, border-color 0.3s ease;
}

.solution-tab:hover {
  background: var(--dark-300);
}

.solution-tab.active {
  background: linear-gradient(90deg, rgba(14, 165, 233, 0.2), rgba(139, 92, 246, 0.2));
  border-color: var(--border);
}

.solution-tab-icon {
  width: 46px;
  height: 46px;
  border-radius: 50%;
  background: var(--dark-300);
  color: var(--text-muted);
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
}

.solution-tab.active .solution-tab-icon {
  background: var(--cta-gradient);
  color: #fff;
}

.solution-detail {
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 16px;
  padding: 40px;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 40px;
  align-items: center;
}

.solution-points {
  display: flex;
  flex-direction: column;
  gap: 16px;
  margin-top: 24px;
}

.solution-point {
  display: flex;
  align-items: center;
  gap: 16px;
}

.point-dot {
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--cta-gradient);
  flex-shrink: 0;
}

.solution-visual {
  height: 320px;
  border-radius: 12px;
  border: 1px solid var(--border);
  background: var(--dark-300);
  display: flex;
  align-items: center;
  justify-content: center;
}

.solution-visual-orb {
  width: 64px;
  height: 64px;
  border-radius: 50%;
  background: var(--cta-gradient);
  color: #fff;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Innovation Panel === */
.innovation-panel {
  margin-top: 56px;
  background: var(--dark-300);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 40px;
}

.innovation-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 24px;
  margin-top: 24px;
}

.innovation-card {
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 10px;
  padding: 18px;
}

/* === CTA === */
.cta {
  padding: 80px 0;
  background:
    linear-gradient(90deg, rgba(14, 165, 233, 0.08), transparent 40%, rgba(139, 92, 246, 0.08)),
    var(--dark);
  text-align: center;
}

.cta-title {
  font-size: 2.4rem;
  font-weight: 700;
  margin-bottom: 24px;
  color: #fff;
}

.cta-actions {
  display: flex;
  justify-content: center;
  gap: 24px;
  margin-bottom: 48px;
}

.trust-row {
  display: flex;
  justify-content: center;
  gap: 48px;
}

.trust-item {
  display: flex;
  align-items: center;
  gap: 12px;
  text-align: left;
}

.trust-icon {
  width: 46px;
  height: 46px;
  border-radius: 50%;
  background: linear-gradient(90deg, rgba(14, 165, 233, 0.2), rgba(139, 92, 246, 0.2));
  color: var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Products Page === */
.page-eyebrow {
  display: inline-block;
  margin-bottom: 14px;
  padding: 4px 16px;
  border-radius: 999px;
  background: rgba(18, 18, 26, 0.8);
  border: 1px solid var(--border-soft);
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.category-tabs {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 20px;
  margin-bottom: 40px;
}

.category-tab {
  display: flex;
  align-items: center;
  gap: 16px;
  padding: 18px 22px;
  border-radius: 12px;
  background: rgba(18, 18, 26, 0.8);
  border: 1px solid var(--border-soft);
  color: var(--text-secondary);
  text-align: left;
  transition: background 0.3s ease, border-color 0.3s ease, color 0.3s ease;
}

.category-tab:hover {
  background: rgba(26, 26, 36, 0.8);
}

.category-tab.active {
  color: #fff;
  border-color: rgba(255, 255, 255, 0.2);
}

.category-tab-icon {
  width: 52px;
  height: 52px;
  border-radius: 50%;
  background: rgba(26, 26, 36, 0.8);
  color: var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
}

.category-tab-name {
  font-size: 1.1rem;
  font-weight: 600;
}

.category-tab-desc {
  font-size: 0.85rem;
  opacity: 0.8;
}

.tab-indicator {
  height: 2px;
  width: 48px;
  margin-top: 8px;
  border-radius: 1px;
  background: #fff;
}

.products-toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 24px;
}

.category-heading {
  font-size: 1.45rem;
  font-weight: 700;
  color: #fff;
}

.toolbar-actions {
  display: flex;
  align-items: center;
  gap: 12px;
}

.view-toggle {
  display: flex;
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 8px;
  overflow: hidden;
}

.view-toggle-btn {
  padding: 8px 14px;
  color: var(--text-muted);
  transition: background 0.2s ease, color 0.2s ease;
}

.view-toggle-btn.active {
  background: var(--dark-300);
  color: #fff;
}

.filter-toggle-btn {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 8px 16px;
  border-radius: 8px;
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  color: var(--text-secondary);
  transition: color 0.2s ease, border-color 0.2s ease;
}

.filter-toggle-btn:hover,
.filter-toggle-btn.active {
  color: #fff;
  border-color: rgba(0, 174, 239, 0.4);
}

/* === Filter Panel === */
.filter-panel {
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 12px;
  padding: 24px;
  margin-bottom: 32px;
}

.filter-search {
  width: 100%;
  background: var(--dark-300);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 12px 16px;
  color: #fff;
  margin-bottom: 20px;
}

.filter-search:focus {
  outline: none;
  border-color: var(--accent);
}

.facet-groups {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 24px;
}

.facet-title {
  font-size: 0.85rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
  margin-bottom: 10px;
}

.facet-option {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 4px 0;
  color: var(--text-secondary);
  cursor: pointer;
  font-size: 0.92rem;
}

.facet-option input {
  accent-color: var(--accent);
}

/* === Product Grid === */
.product-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 28px;
}

.product-card {
  background: rgba(18, 18, 26, 0.9);
  border: 1px solid var(--border-soft);
  border-radius: 12px;
  overflow: hidden;
  transition: border-color 0.3s ease, transform 0.3s ease;
}

.product-card:hover {
  border-color: var(--border);
  transform: translateY(-4px);
}

.card-accent {
  height: 6px;
}

.product-image-wrap {
  position: relative;
  height: 180px;
  background: var(--dark-300);
  overflow: hidden;
}

.product-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.9;
}

.image-fallback {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, rgba(26, 26, 36, 0.85), rgba(18, 18, 26, 0.85));
}

.fallback-icon-orb {
  width: 64px;
  height: 64px;
  border-radius: 50%;
  background: linear-gradient(90deg, rgba(14, 165, 233, 0.3), rgba(139, 92, 246, 0.3));
  color: var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
}

.image-title {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 16px;
  background: linear-gradient(0deg, rgba(18, 18, 26, 0.95), transparent);
  font-size: 1.15rem;
  font-weight: 700;
  color: #fff;
}

.badge {
  position: absolute;
  top: 12px;
  right: 12px;
  padding: 3px 10px;
  border-radius: 999px;
  font-size: 0.72rem;
  font-weight: 600;
  color: #fff;
}

.card-body {
  padding: 22px;
}

.card-desc {
  color: var(--text-muted);
  font-size: 0.92rem;
  margin-bottom: 18px;
}

.feature-box {
  background: rgba(26, 26, 36, 0.5);
  border: 1px solid var(--border-soft);
  border-radius: 10px;
  padding: 14px;
  margin-bottom: 16px;
}

.feature-box-title {
  font-size: 0.82rem;
  font-weight: 600;
  color: #fff;
  margin-bottom: 8px;
}

.feature-row {
  display: flex;
  align-items: flex-start;
  gap: 8px;
  color: var(--text-secondary);
  font-size: 0.85rem;
  margin-bottom: 6px;
}

.feature-row .check-icon {
  color: var(--accent);
  flex-shrink: 0;
  margin-top: 2px;
}

.more-features {
  text-align: right;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.card-footer {
  border-top: 1px solid var(--border-soft);
  padding-top: 14px;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.details-btn {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  color: var(--accent);
  font-weight: 500;
  transition: color 0.3s ease;
}

.details-btn:hover {
  color: #fff;
}

.card-category {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Product List === */
.product-list {
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.list-item {
  display: flex;
  background: rgba(18, 18, 26, 0.9);
  border: 1px solid var(--border-soft);
  border-radius: 12px;
  overflow: hidden;
  transition: border-color 0.3s ease;
}

.list-item:hover {
  border-color: var(--border);
}

.list-item-media {
  position: relative;
  width: 230px;
  flex-shrink: 0;
  background: var(--dark-300);
}

.list-accent {
  position: absolute;
  top: 0;
  left: 0;
  bottom: 0;
  width: 6px;
}

.list-body {
  flex: 1;
  padding: 22px;
}

.list-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 12px;
}

.list-feature-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 6px 18px;
  margin-bottom: 14px;
}

.list-actions {
  display: flex;
  justify-content: flex-end;
}

.no-products {
  text-align: center;
  padding: 64px 0;
  color: var(--text-muted);
}

/* === Product Detail Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
  background: rgba(10, 10, 14, 0.82);
  backdrop-filter: blur(10px);
}

.product-modal {
  width: 100%;
  max-width: 960px;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--dark-200);
  border: 1px solid var(--border);
  border-radius: 14px;
  box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
}

.modal-hero {
  position: relative;
  height: 260px;
  background: var(--dark-300);
}

.modal-close-btn {
  position: absolute;
  top: 16px;
  right: 16px;
  width: 38px;
  height: 38px;
  border-radius: 50%;
  background: rgba(26, 26, 36, 0.85);
  color: #fff;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background 0.3s ease;
}

.modal-close-btn:hover {
  background: var(--dark-200);
}

.modal-hero-footer {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 24px;
  background: linear-gradient(0deg, rgba(18, 18, 26, 0.95), transparent);
}

.modal-accent-bar {
  height: 4px;
  width: 80px;
  border-radius: 2px;
  margin-bottom: 14px;
}

.modal-title {
  font-size: 1.9rem;
  font-weight: 700;
  color: #fff;
}

.modal-tabs {
  display: flex;
  gap: 8px;
  padding: 16px;
  border-bottom: 1px solid var(--border-soft);
}

.modal-tab {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 8px 16px;
  border-radius: 8px;
  color: var(--text-muted);
  transition: background 0.2s ease, color 0.2s ease;
}

.modal-tab:hover {
  color: #fff;
  background: rgba(26, 26, 36, 0.5);
}

.modal-tab.active {
  background: var(--dark-300);
  color: #fff;
}

.modal-body {
  padding: 32px;
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 32px;
}

.modal-section-title {
  font-size: 1.2rem;
  font-weight: 600;
  color: #fff;
  margin-bottom: 16px;
}

.modal-feature-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 12px;
}

.spec-table {
  width: 100%;
  border-collapse: collapse;
  background: rgba(26, 26, 36, 0.5);
  border: 1px solid var(--border-soft);
  border-radius: 10px;
  overflow: hidden;
}

.spec-table td {
  padding: 12px 16px;
}

.spec-table tr:nth-child(odd) {
  background: rgba(26, 26, 36, 0.3);
}

.spec-label {
  color: var(--text-secondary);
  font-weight: 500;
}

.spec-value {
  color: #fff;
}

.use-case-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 16px;
}

.use-case-card {
  display: flex;
  align-items: flex-start;
  gap: 12px;
  background: rgba(26, 26, 36, 0.5);
  border: 1px solid var(--border-soft);
  border-radius: 10px;
  padding: 16px;
  color: var(--text-secondary);
}

.side-card {
  background: rgba(18, 18, 26, 0.9);
  border: 1px solid var(--border-soft);
  border-radius: 12px;
  padding: 22px;
  margin-bottom: 20px;
}

.side-label {
  font-size: 0.8rem;
  color: var(--text-muted);
}

.side-value {
  color: #fff;
  margin-bottom: 12px;
}

.side-divider {
  height: 1px;
  background: var(--border-soft);
  margin: 14px 0;
}

.request-btn {
  display: block;
  width: 100%;
  text-align: center;
  padding: 12px;
  border-radius: 8px;
  background: var(--cta-gradient);
  color: #fff;
  font-weight: 500;
  transition: box-shadow 0.3s ease;
}

.request-btn:hover {
  box-shadow: var(--glow);
}

/* === Featured Products === */
.featured-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 28px;
}

.featured-card {
  background: rgba(18, 18, 26, 0.7);
  border: 1px solid var(--border-soft);
  border-radius: 12px;
  overflow: hidden;
  transition: border-color 0.3s ease;
}

.featured-card:hover {
  border-color: var(--border);
}

.featured-media {
  position: relative;
  height: 170px;
  background: var(--dark-300);
}

.featured-top-bar {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
}

.featured-footer {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 14px;
  background: linear-gradient(0deg, rgba(18, 18, 26, 0.95), transparent);
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.featured-name {
  font-size: 1.05rem;
  font-weight: 600;
  color: #fff;
}

.featured-tag {
  font-size: 0.72rem;
  background: rgba(26, 26, 36, 0.8);
  color: var(--text-secondary);
  padding: 3px 8px;
  border-radius: 4px;
}

.featured-body {
  padding: 20px;
}

.featured-link {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  margin-top: 14px;
  color: var(--accent);
  transition: color 0.3s ease;
}

.featured-link:hover {
  color: #fff;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 40px;
}

.contact-card {
  background: var(--dark-200);
  border: 1px solid var(--border-soft);
  border-radius: 14px;
  padding: 32px;
  margin-bottom: 28px;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 24px;
  margin-bottom: 24px;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.form-label {
  font-size: 0.88rem;
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: 8px;
}

.form-input,
.form-select,
.form-textarea {
  width: 100%;
  background: var(--dark-300);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 12px 16px;
  color: #fff;
  font: inherit;
}

.form-input:focus,
.form-select:focus,
.form-textarea:focus {
  outline: none;
  border-color: var(--accent);
}

.form-textarea {
  resize: vertical;
  min-height: 110px;
}

.form-note {
  display: flex;
  align-items: center;
  gap: 12px;
  color: var(--text-muted);
  font-size: 0.85rem;
  margin: 20px 0;
}

.form-note .lock-icon {
  color: var(--accent);
}

.submit-btn {
  width: 100%;
  padding: 14px;
  border-radius: 10px;
  background: var(--cta-gradient);
  color: #fff;
  font-weight: 500;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  transition: box-shadow 0.3s ease, background 0.3s ease;
}

.submit-btn:hover:enabled {
  box-shadow: var(--glow);
}

.submit-btn:disabled {
  opacity: 0.75;
  cursor: default;
}

.submit-btn.success {
  background: var(--success);
}

.direct-contact-row {
  display: flex;
  align-items: center;
  gap: 12px;
  margin-bottom: 18px;
  color: #fff;
}

.direct-contact-row .contact-icon {
  color: var(--accent);
}

.direct-contact-label {
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: 4px;
}

/* === Footer === */
.site-footer {
  background: var(--dark-200);
  border-top: 1px solid var(--border-soft);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 40px;
  padding: 48px 0;
}

.footer-heading {
  font-size: 1.05rem;
  font-weight: 600;
  color: #fff;
  margin-bottom: 16px;
}

.footer-brand {
  font-size: 1.2rem;
  font-weight: 700;
  background: linear-gradient(90deg, var(--accent), var(--secondary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  margin-bottom: 16px;
}

.footer-blurb {
  color: var(--text-muted);
  font-size: 0.88rem;
}

.footer-links {
  list-style: none;
}

.footer-links li {
  margin-bottom: 8px;
}

.footer-link {
  color: var(--text-muted);
  transition: color 0.2s ease;
}

.footer-link:hover {
  color: #fff;
}

.footer-contact-row {
  display: flex;
  align-items: center;
  gap: 12px;
  color: var(--text-muted);
  margin-bottom: 8px;
}

.footer-contact-row .contact-icon {
  color: var(--accent);
}

.footer-bottom {
  border-top: 1px solid var(--border-soft);
  padding: 24px 0;
  display: flex;
  justify-content: space-between;
  align-items: center;
  color: var(--text-muted);
  font-size: 0.85rem;
}
"#;
